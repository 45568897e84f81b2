use snafu::{Location, Snafu};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(module, visibility(pub))]
pub enum Error {
    #[snafu(display(
        "No arrival row in the batch carried a quantum type code, landing completeness cannot be evaluated"
    ))]
    MissingQuantumData {
        #[snafu(implicit)]
        location: Location,
    },
    #[snafu(display("Trip period was invalid"))]
    InvalidPeriod {
        #[snafu(implicit)]
        location: Location,
        source: vessel_core::DateRangeError,
    },
}
