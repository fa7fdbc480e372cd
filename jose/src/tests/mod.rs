mod claims;
mod fixtures;
mod token;
