//! Board revision profiles for the Lumen display
//!
//! Each module pins down the descriptor literals for one physical
//! board revision: the pin map, clock rates and panel geometry that
//! form the board's wiring contract. Firmware start-up picks the
//! profile matching its target and hands the composed descriptor to
//! the rendering driver.

#![no_std]
#![deny(unsafe_code)]

pub mod esp32c6_st7796;
