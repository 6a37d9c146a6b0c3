/// Virtual environment adapters for hosting the license generator
mod temp_venv;

pub use temp_venv::{venv_interpreter, TempVenv, TempVenvProvisioner};
