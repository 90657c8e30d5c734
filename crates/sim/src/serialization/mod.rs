pub mod ncpf;
