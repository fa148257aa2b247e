mod favorites;
mod manager;
mod system;
mod watcher;

pub use self::{
    favorites::FavoritesService, manager::ManagerService, system::SystemService,
    watcher::WatcherService,
};
