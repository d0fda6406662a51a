// Engine modules: the collaborators the world talks to (clock, input, renderer, resources)

pub mod assets;
pub mod game_loop;
pub mod input;
pub mod renderer;
