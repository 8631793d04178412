// Copyright @genoise 2026

pub mod image_utils;
