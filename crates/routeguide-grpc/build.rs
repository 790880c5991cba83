fn main() -> Result<(), Box<dyn std::error::Error>> {
    tonic_build::configure()
        .build_server(true)
        .build_client(true)
        .compile_protos(&["proto/route_guide.proto"], &["proto"])?;

    println!("cargo:rerun-if-changed=proto/route_guide.proto");

    Ok(())
}
