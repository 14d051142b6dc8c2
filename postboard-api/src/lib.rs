extern crate serde;
#[macro_use]
extern crate serde_derive;

/// A remote resource that can be fetched as a whole
pub trait Endpoint {
    fn endpoint() -> &'static str;
}

macro_rules! api {
    ($url:expr => $ep:ty) => {
        impl Endpoint for $ep {
            fn endpoint() -> &'static str {
                $url
            }
        }
    };
}

pub mod posts;
