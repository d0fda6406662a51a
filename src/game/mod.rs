// Game-side logic: the characters that live in the world

pub mod characters;
