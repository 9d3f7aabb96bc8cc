pub mod rol;
pub mod tipo_movimiento;

pub use rol::Rol;
pub use tipo_movimiento::TipoMovimiento;
