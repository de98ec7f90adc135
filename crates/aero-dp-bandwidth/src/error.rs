use thiserror::Error;

pub type Result<T> = std::result::Result<T, LinkError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkError {
    #[error("invalid link configuration: {0}")]
    InvalidLinkConfig(&'static str),

    #[error("stream needs {required_mbps} Mbps but the link carries {available_mbps} Mbps")]
    InsufficientLinkBandwidth {
        required_mbps: u64,
        available_mbps: u64,
    },

    #[error("payload of {actual_pbn} PBN exceeds {max_slots} timeslots")]
    PbnExceedsTimeslots { actual_pbn: u32, max_slots: u32 },
}
