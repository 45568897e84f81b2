use snafu::{Location, Snafu};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(module, visibility(pub))]
pub enum Error {
    #[snafu(display("Trip assembly failed"))]
    TripAssembly {
        #[snafu(implicit)]
        location: Location,
        source: trip_assembler::Error,
    },
}
