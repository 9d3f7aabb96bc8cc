pub mod material;
pub mod movimiento;
pub mod ubicacion;
pub mod usuario;
