#![allow(dead_code)]

pub mod order;
