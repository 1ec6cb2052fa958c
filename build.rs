fn main() {
    // Tell Cargo to rerun this build script if the demo resources change.
    println!("cargo:rerun-if-changed=demo.rc");

    // Resources only exist for Windows targets. They are linked into the demo
    // binary alone, so the library's test executables carry none.
    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() != Ok("windows") {
        return;
    }
    if let Err(e) =
        embed_resource::compile_for("demo.rc", ["win32_bind_demo"], embed_resource::NONE)
            .manifest_optional()
    {
        println!("cargo:warning=demo resources were not embedded: {e}");
    }
}
