/// Why a scalar multiplication or affine conversion failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Scratch memory for the ephemeral tables could not be reserved, or there were too many
    /// points to process in one call.
    AllocationFailure,
    /// A point coordinate does not fit in 256 bits.
    CoordinatesOutOfRange,
    /// A base-point scalar was given but the group has no generator.
    UndefinedGenerator,
    /// A group was created with order zero.
    ZeroOrder,
    /// Affine coordinates were requested for the point at infinity.
    PointAtInfinity,
    /// The number of points and the number of scalars differ.
    MismatchedInputs {
        /// how many points were passed
        points: usize,
        /// how many scalars were passed
        scalars: usize,
    },
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use Error::*;
        match self {
            AllocationFailure => write!(f, "failed to allocate scratch space for the point tables"),
            CoordinatesOutOfRange => write!(f, "point coordinate is wider than 256 bits"),
            UndefinedGenerator => write!(f, "the group has no generator to multiply"),
            ZeroOrder => write!(f, "the group order must be non-zero"),
            PointAtInfinity => write!(f, "the point at infinity has no affine coordinates"),
            MismatchedInputs { points, scalars } => write!(
                f,
                "got {} points but {} scalars",
                points, scalars
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
