//! Launch-context credential resolution.

mod probes;
mod resolver;

pub use probes::{NativeBridgeProbe, SdkLaunchParamsProbe, UrlParamProbe};
pub use resolver::CredentialResolver;
