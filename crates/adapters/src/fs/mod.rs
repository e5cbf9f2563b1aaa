mod clock;
mod scanner;

pub use clock::MonotonicClock;
pub use scanner::WalkdirArtistDirectory;
