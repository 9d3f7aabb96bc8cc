pub mod material;
pub mod movimiento;
pub mod ubicacion;
pub mod usuario;

pub use material::Material;
pub use movimiento::Movimiento;
pub use ubicacion::Ubicacion;
pub use usuario::Usuario;
