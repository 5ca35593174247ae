pub mod mock_app;
pub mod mock_terminal;
pub mod store_dir;

pub use mock_app::TestApp;
pub use mock_terminal::{create_test_terminal, events};
pub use store_dir::TestStoreDir;
