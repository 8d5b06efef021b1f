pub mod scanners;
