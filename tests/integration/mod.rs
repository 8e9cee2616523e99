// tests/integration/mod.rs
//! End-to-end tests of the public API against the in-memory directory.


#[cfg(test)]
mod fetcher;

#[cfg(test)]
mod browsing;
