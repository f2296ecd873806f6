use kinema::{
    EulerIntegrator, Integrator, IntegratorConfig, Rk4Integrator, Solid, SolidHandle, SolidSet,
    Vector2d,
};
use wasm_bindgen::prelude::*;

// ---- Ship Demo ----

/// A single thrusting ship. Thrust pushes along the current heading.
#[wasm_bindgen]
pub struct ShipDemo {
    ship: Solid<f32>,
    thrust: f32,
    thrusting: bool,
}

#[wasm_bindgen]
impl ShipDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(x: f32, y: f32, mass: f32) -> Result<ShipDemo, JsError> {
        let ship = Solid::new(mass, None, Some(Vector2d::from_cartesian(x, y)))?;
        Ok(ShipDemo { ship, thrust: 120.0, thrusting: false })
    }

    /// Switch between the adaptive RK4 integrator and single-step Euler.
    pub fn use_euler(&mut self, euler: bool) {
        self.ship.integrator = if euler {
            Integrator::Euler(EulerIntegrator)
        } else {
            Integrator::Rk4(Rk4Integrator::new(IntegratorConfig::new()))
        };
    }

    pub fn set_thrusting(&mut self, on: bool) {
        self.thrusting = on;
    }

    /// Turn rate in degrees per second.
    pub fn set_turn_rate(&mut self, rate: f32) {
        self.ship.angular_velocity = rate;
    }

    pub fn update(&mut self, dt: f32) -> Result<(), JsError> {
        if self.thrusting {
            self.ship.apply_force(Vector2d::from_polar(self.thrust, self.ship.heading));
        } else {
            self.ship.clear_force();
        }
        self.ship.update(dt)?;
        Ok(())
    }

    /// Returns [x, y, heading, speed]
    pub fn state(&self) -> Vec<f32> {
        vec![
            self.ship.position.x(),
            self.ship.position.y(),
            self.ship.heading,
            self.ship.velocity.magnitude(),
        ]
    }
}

// ---- Swarm Demo ----

/// Many independent solids pushed toward a target point.
#[wasm_bindgen]
pub struct SwarmDemo {
    set: SolidSet<f32>,
    handles: Vec<SolidHandle>,
    target: Vector2d<f32>,
    pull: f32,
}

#[wasm_bindgen]
impl SwarmDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(count: usize) -> Result<SwarmDemo, JsError> {
        let mut set = SolidSet::new();
        let mut handles = Vec::with_capacity(count);
        for i in 0..count {
            let angle = i as f32 * 0.7;
            let radius = 50.0 + (i % 7) as f32 * 30.0;
            let pos = Vector2d::from_polar(radius, angle) + Vector2d::from_cartesian(350.0, 250.0);
            let vel = Vector2d::from_polar(40.0, angle + 1.57);
            let solid = Solid::new(1.0 + (i % 3) as f32, Some(vel), Some(pos))?
                .with_angular_velocity(90.0);
            handles.push(set.insert(solid)?);
        }
        Ok(SwarmDemo {
            set,
            handles,
            target: Vector2d::from_cartesian(350.0, 250.0),
            pull: 30.0,
        })
    }

    pub fn set_target(&mut self, x: f32, y: f32) {
        self.target.set_cartesian(x, y);
    }

    pub fn update(&mut self, dt: f32) -> Result<(), JsError> {
        let target = self.target;
        let pull = self.pull;
        for (_, solid) in self.set.iter_mut() {
            let to_target = target - solid.position;
            solid.apply_force(Vector2d::from_polar(pull, to_target.angle()));
        }
        self.set.step(dt)?;
        Ok(())
    }

    /// Drop the solid at `index`, if it is still alive.
    pub fn remove(&mut self, index: usize) -> bool {
        match self.handles.get(index) {
            Some(&handle) => self.set.remove(handle).map(Solid::destroy).is_ok(),
            None => false,
        }
    }

    /// Returns flat [x0, y0, h0, x1, y1, h1, ...] for live solids
    pub fn states(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.set.len() * 3);
        for (_, s) in self.set.iter() {
            out.push(s.position.x());
            out.push(s.position.y());
            out.push(s.heading);
        }
        out
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }
}
