// Copyright (c) 2026 Atrium Labs
// SPDX-License-Identifier: AGPL-3.0
//! Compiles the resource service protobuf definitions in `../proto` into
//! tonic server/client stubs, included via `tonic::include_proto!` in
//! `src/presentation/grpc/server.rs`. `protoc` is vendored so no system
//! install is required.

fn main() -> Result<(), Box<dyn std::error::Error>> {
    std::env::set_var("PROTOC", protoc_bin_vendored::protoc_bin_path()?);

    tonic_build::configure()
        .build_server(true)
        .build_client(true)
        .compile_protos(
            &["../proto/roles.proto", "../proto/workspaces.proto"],
            &["../proto"],
        )?;

    println!("cargo:rerun-if-changed=../proto/roles.proto");
    println!("cargo:rerun-if-changed=../proto/workspaces.proto");

    Ok(())
}
