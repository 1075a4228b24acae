use rand::Rng;

pub const PARTICLE_COUNT: usize = 500;
pub const PARTICLE_COLOR: &str = "#6b5bff";
/// World-space point size before perspective attenuation.
pub const PARTICLE_SIZE: f64 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Axis-aligned box centred on the origin, given by its half extents.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub half_x: f64,
    pub half_y: f64,
    pub half_z: f64,
}

pub const CLOUD_BOUNDS: Bounds = Bounds {
    half_x: 10.0,
    half_y: 5.0,
    half_z: 10.0,
};

/// Orientation of the cloud at a given time: yaw about Y, then pitch about X.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rotation {
    pub yaw: f64,
    pub pitch: f64,
}

impl Rotation {
    pub fn at(elapsed: f64) -> Self {
        Self {
            yaw: elapsed * 0.1,
            pitch: (elapsed * 0.1).sin() * 0.2,
        }
    }

    pub fn apply(&self, p: Vec3) -> Vec3 {
        let (sin_y, cos_y) = self.yaw.sin_cos();
        let x = p.x * cos_y + p.z * sin_y;
        let z = -p.x * sin_y + p.z * cos_y;

        let (sin_x, cos_x) = self.pitch.sin_cos();
        Vec3 {
            x,
            y: p.y * cos_x - z * sin_x,
            z: p.y * sin_x + z * cos_x,
        }
    }
}

/// Perspective camera on the +Z axis looking at the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub distance: f64,
    pub fov_degrees: f64,
    pub near: f64,
}

pub const BACKGROUND_CAMERA: Camera = Camera {
    distance: 15.0,
    fov_degrees: 50.0,
    near: 0.1,
};

/// A point in canvas pixels with its on-screen square size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
    pub x: f64,
    pub y: f64,
    pub size: f64,
}

impl Camera {
    pub fn project(&self, p: Vec3, width: f64, height: f64) -> Option<Projected> {
        let depth = self.distance - p.z;
        if depth <= self.near || width <= 0.0 || height <= 0.0 {
            return None;
        }
        let focal = 1.0 / (self.fov_degrees.to_radians() / 2.0).tan();
        let aspect = width / height;
        let ndc_x = p.x * focal / (aspect * depth);
        let ndc_y = p.y * focal / depth;

        Some(Projected {
            x: (ndc_x + 1.0) / 2.0 * width,
            y: (1.0 - ndc_y) / 2.0 * height,
            size: (PARTICLE_SIZE * (height / 2.0) / depth).max(1.0),
        })
    }
}

/// Randomly sampled point cloud. A fresh one is drawn for every mounted field.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleCloud {
    points: Vec<Vec3>,
}

impl ParticleCloud {
    pub fn sample<R: Rng + ?Sized>(rng: &mut R, count: usize, bounds: Bounds) -> Self {
        let points = (0..count)
            .map(|_| Vec3 {
                x: rng.gen_range(-bounds.half_x..=bounds.half_x),
                y: rng.gen_range(-bounds.half_y..=bounds.half_y),
                z: rng.gen_range(-bounds.half_z..=bounds.half_z),
            })
            .collect();
        Self { points }
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points().len()
    }

    /// Screen positions of every visible point at `elapsed` seconds.
    pub fn frame<'a>(
        &'a self,
        elapsed: f64,
        camera: &'a Camera,
        width: f64,
        height: f64,
    ) -> impl Iterator<Item = Projected> + 'a {
        let rotation = Rotation::at(elapsed);
        self.points()
            .iter()
            .filter_map(move |p| camera.project(rotation.apply(*p), width, height))
    }
}
