mod noisy_sensor_generator;

pub use noisy_sensor_generator::NoisySensorGenerator;
