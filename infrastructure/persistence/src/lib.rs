pub mod keys;
pub mod storage;
pub mod cart {
    pub mod repository;
}
pub mod favorite {
    pub mod repository;
}
