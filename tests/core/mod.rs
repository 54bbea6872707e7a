// tests/core/mod.rs

#[cfg(test)]
mod buffer;
#[cfg(test)]
mod view;
