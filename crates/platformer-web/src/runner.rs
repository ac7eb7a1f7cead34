use platformer_engine::{
    build_draw_buffer, DrawBuffer, EngineContext, FixedTimestep, Game, GameConfig, InputEvent, InputQueue,
    InputState, LevelError, RenderContext,
};

/// Generic game runner that wires up the engine loop.
///
/// Each game crate creates a `thread_local!` GameRunner and exports free
/// functions via `#[wasm_bindgen]` (see [`export_game!`](crate::export_game)),
/// because wasm-bindgen cannot export generic structs directly.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    queue: InputQueue,
    input: InputState,
    draw_buffer: DrawBuffer,
    timestep: FixedTimestep,
    initialized: bool,
}

fn timestep_for(config: &GameConfig) -> FixedTimestep {
    FixedTimestep::new(config.fixed_dt).with_max_steps(config.max_steps_per_frame)
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        let timestep = timestep_for(&config);
        let draw_buffer = DrawBuffer::with_capacity(config.max_instances);

        Self {
            game,
            ctx: EngineContext::with_config(config),
            queue: InputQueue::new(),
            input: InputState::new(),
            draw_buffer,
            timestep,
            initialized: false,
        }
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        let config = self.game.config();
        if let Err(err) = config.validate() {
            log::error!("invalid game config, using defaults: {}", err);
            self.ctx.set_config(GameConfig::default());
        } else {
            self.ctx.set_config(config);
        }
        self.timestep = timestep_for(&self.ctx.config);
        self.game.init(&mut self.ctx);
        self.initialized = true;
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.queue.push(event);
    }

    /// Run one frame: fold input, run the fixed ticks, build the draw buffer.
    ///
    /// Each tick is `Game::update` then physics then animations, all with the
    /// same fixed `dt`.
    pub fn tick(&mut self, frame_dt: f32) {
        if !self.initialized {
            return;
        }

        let events = self.queue.drain();
        self.input.apply(&events);

        let steps = self.timestep.accumulate(frame_dt);
        let dt = self.timestep.dt();
        for _ in 0..steps {
            self.game.update(&mut self.ctx, &self.input, dt);
            self.ctx.step_physics(dt);
            self.ctx.step_animations(dt);
            self.input.clear_edges();
        }

        build_draw_buffer(&self.ctx.scene, &self.ctx.textures, &mut self.draw_buffer);

        // Allow game to add its own draw instances
        {
            let mut render_ctx = RenderContext {
                draw_buffer: &mut self.draw_buffer,
                textures: &self.ctx.textures,
            };
            self.game.render(&mut render_ctx);
        }

        let max = self.ctx.config.max_instances;
        if self.draw_buffer.instances.len() > max {
            log::warn!("{} draw instances exceed the cap of {}", self.draw_buffer.instances.len(), max);
            self.draw_buffer.instances.truncate(max);
            let split = self.draw_buffer.static_split.min(max as u32);
            self.draw_buffer.set_static_split(split);
        }
    }

    /// Register the textures listed in a manifest. Returns the registry size.
    pub fn load_manifest(&mut self, json: &str) -> Result<usize, serde_json::Error> {
        self.ctx.load_manifest(json)
    }

    pub fn export_level(&self) -> Option<String> {
        self.game.export_level()
    }

    pub fn import_level(&mut self, json: &str) -> Result<(), LevelError> {
        self.game.import_level(&mut self.ctx, json)
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn context(&self) -> &EngineContext {
        &self.ctx
    }

    pub fn draw_buffer(&self) -> &DrawBuffer {
        &self.draw_buffer
    }

    // ---- Pointer accessors for reads from JS ----

    pub fn instances_ptr(&self) -> *const f32 {
        self.draw_buffer.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.draw_buffer.instance_count()
    }

    pub fn static_split(&self) -> u32 {
        self.draw_buffer.static_split
    }

    pub fn world_width(&self) -> f32 {
        self.ctx.config.world_width
    }

    pub fn world_height(&self) -> f32 {
        self.ctx.config.world_height
    }

    pub fn max_instances(&self) -> u32 {
        self.ctx.config.max_instances as u32
    }

    pub fn ticks(&self) -> u64 {
        self.timestep.ticks()
    }
}
