use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../../input.css");
    println!("cargo:rerun-if-changed=src/components/");

    let Some(runner) = install_dependencies() else {
        println!("cargo:warning=Npm, Bun or Yarn not found, skipping tailwind.css generation");
        return;
    };

    let status = Command::new(runner)
        .args([
            "@tailwindcss/cli",
            "-i",
            "../../input.css",
            "-o",
            "./assets/tailwind.css",
            "--minify",
        ])
        .status();

    match status {
        Ok(status) if status.success() => {}
        Ok(status) => println!("cargo:warning=Tailwind CLI exited with {status}"),
        Err(e) => println!("cargo:warning=Failed to build UI assets: {e}"),
    }
}

fn command_name(name: &'static str, windows_name: &'static str) -> &'static str {
    if cfg!(target_os = "windows") {
        windows_name
    } else {
        name
    }
}

fn install_dependencies() -> Option<&'static str> {
    let candidates = [
        (command_name("bun", "bun.cmd"), command_name("bunx", "bunx.cmd")),
        (command_name("yarn", "yarn.cmd"), command_name("yarn", "yarn.cmd")),
        (command_name("npm", "npm.cmd"), command_name("npx", "npx.cmd")),
    ];

    candidates.into_iter().find_map(|(installer, runner)| {
        Command::new(installer)
            .arg("install")
            .status()
            .ok()
            .filter(|status| status.success())
            .map(|_| runner)
    })
}
