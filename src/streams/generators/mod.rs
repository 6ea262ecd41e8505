mod noisy_sensor;

pub use noisy_sensor::NoisySensorGenerator;
