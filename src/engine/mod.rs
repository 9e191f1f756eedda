// Engine modules: physics, renderer, game loop

pub mod game_loop;
pub mod physics;
pub mod renderer;
