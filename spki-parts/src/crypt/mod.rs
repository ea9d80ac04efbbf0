//! Cryptographic functionality.


pub mod elliptic;
