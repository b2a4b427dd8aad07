pub mod books;
pub mod feed;
pub mod flats;
pub mod inbox;
pub mod movies;
pub mod pagination;
pub mod restaurants;
pub mod serde_time;
pub mod trips;

pub use books::{BookDto, BookInput};
pub use feed::{FeedPostDto, FeedPostInput};
pub use flats::{FlatDto, FlatInput};
pub use inbox::{ContactMessageDto, ContactMessageInput, SuggestionDto, SuggestionInput};
pub use movies::{MovieDto, MovieInput};
pub use pagination::CursorPage;
pub use restaurants::{RestaurantDto, RestaurantInput};
pub use trips::{TripDto, TripInput};
