pub mod id_utils;
pub mod wei_utils;
