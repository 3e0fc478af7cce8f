// build.rs
fn main() {
    #[cfg(windows)]
    {
        let mut res = winres::WindowsResource::new();
        res.set_icon("assets/icon.ico");    // multi-size .ico
        if let Err(e) = res.compile() {
            println!("cargo:warning=could not embed the window icon: {e}");
        }
    }
}
