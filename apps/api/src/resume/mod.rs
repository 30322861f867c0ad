// Resume endpoints: HTML preview and PDF download.

pub mod attachment;
pub mod handlers;
