mod draft;
mod value_object;

pub use draft::*;
pub use value_object::*;

cfg_if::cfg_if! {
    if #[cfg(feature = "full")] {
        mod command;
        mod error;
        mod sender;
        mod template;

        pub use command::*;
        pub use error::*;
        pub use sender::*;
        pub use template::*;
    }
}
