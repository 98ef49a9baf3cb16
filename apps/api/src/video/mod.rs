// Mock video generation. No rendering pipeline exists; responses are static apart from the
// thumbnail seed and the content-type tag.

pub mod handlers;
pub mod mock;
