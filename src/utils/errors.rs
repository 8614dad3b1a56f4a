use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlayerError {
    #[error("Playback rate {0} is not one of the supported steps")]
    InvalidRate(f64),

    #[error("Playlist must contain at least one source")]
    EmptyPlaylist,

    #[error("Player controller disconnected")]
    Disconnected,
}
