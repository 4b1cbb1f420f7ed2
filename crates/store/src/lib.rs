//! Domain store for the ads console: products, campaigns, targeting
//! selection and the new-product wizard drafts, persisted as one JSON
//! snapshot and reconciled with the built-in seed on every open.

pub mod board;
pub mod generation;
pub mod ids;
pub mod normalize;
pub mod reconcile;
pub mod rules;
pub mod seed;
pub mod sentiment;
pub mod slot;
pub mod state;
pub mod store;
pub mod targeting;

pub use generation::{
    generate_sentiment, generate_targeting, shared, GenerationHandle, SentimentRun, SharedStore,
    SENTIMENT_PHASES,
};
pub use ids::IdGenerator;
pub use seed::SeedDataset;
pub use sentiment::sentiment_summary;
pub use slot::{FileSlot, MemorySlot, PersistenceSlot, UnavailableSlot};
pub use state::{StoreState, TransitionContext};
pub use store::{Clock, DomainStore, FixedClock, StoreOptions, SystemClock};
pub use targeting::default_targeting;
