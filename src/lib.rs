pub mod cards;
pub mod catalog_client;
pub mod filter_service;
pub mod image_loader;
pub mod session;
pub mod utilities;

#[cfg(test)]
mod test;
