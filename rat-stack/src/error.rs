use snafu::prelude::*;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    /// A pop was requested while no component was dormant.
    ///
    /// More pops than pushes means the component graph is wrong; hosts treat
    /// this as fatal.
    #[snafu(display("Stack underflow: no dormant component to resume"))]
    StackUnderflow,

    #[snafu(display("Terminal error: {source}"))]
    Terminal { source: std::io::Error },

    #[snafu(display("Failed to start async runtime: {source}"))]
    Runtime { source: std::io::Error },
}

pub type Result<T> = std::result::Result<T, Error>;
