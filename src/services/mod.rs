pub mod fetcher;
pub mod overlay;
pub mod poller;
pub mod visibility;

pub use fetcher::GameFetcher;
pub use overlay::OverlayService;
pub use poller::{OverlayFrame, Poller};
pub use visibility::{Visibility, VisibilityController};
