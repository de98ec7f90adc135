use thiserror::Error;

pub type Result<T> = std::result::Result<T, TimingError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimingError {
    #[error("invalid timing: {0}")]
    InvalidTiming(&'static str),

    #[error("invalid mode request {x_res}x{y_res}@{refresh_rate}")]
    InvalidRequest {
        x_res: u32,
        y_res: u32,
        refresh_rate: u32,
    },

    #[error("generated timing is inconsistent: {0}")]
    InconsistentTiming(&'static str),

    #[error("pixel replication mask must be non-zero")]
    InvalidPixelReplication,

    #[error("alignment delta {delta} exceeds active region {active}")]
    AlignmentExceedsActive { delta: u32, active: u32 },

    #[error("detailed timing descriptor must be 18 bytes (got {len})")]
    DescriptorLength { len: usize },

    #[error("EDID base block holds at most {max} detailed timings (got {count})")]
    TooManyTimings { count: usize, max: usize },
}
