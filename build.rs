use chrono::Datelike;

const CONFIG_KEYS: [&str; 5] = [
    "EMAILJS_SERVICE_ID",
    "EMAILJS_TEMPLATE_ID",
    "EMAILJS_PUBLIC_KEY",
    "APP_NAME",
    "APP_URL",
];

fn main() {
    // Footer copyright year
    let build_year = chrono::Utc::now().year();
    println!("cargo:rustc-env=BUILD_YEAR={}", build_year);

    // Config is baked in with option_env!, so a changed value needs a rebuild
    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    println!("cargo:rerun-if-changed=build.rs");
}
