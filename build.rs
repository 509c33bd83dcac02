use std::env;

fn main() {
    println!("cargo:rerun-if-env-changed=NRLMSISE00_LIB_DIR");
    if let Ok(dir) = env::var("NRLMSISE00_LIB_DIR") {
        println!("cargo:rustc-link-search=native={dir}");
    }
}
