use std::fs;
use std::path::PathBuf;

use bookforge::content::sample_book;
use bookforge::images::Illustrations;
use bookforge::render_page;

fn golden_path() -> PathBuf {
    PathBuf::from("tests/goldens/expected/sample_page.digest")
}

#[test]
fn golden_page_digest_matches_fixture() {
    let page = render_page(&sample_book(), &Illustrations::new());
    let digest = page.digest();

    let expected_path = golden_path();
    if std::env::var("UPDATE_GOLDENS").is_ok() {
        fs::create_dir_all("tests/goldens/expected").ok();
        fs::write(&expected_path, &digest).expect("write golden");
        println!("Updated golden: {:?}", expected_path);
        return;
    }

    if !expected_path.exists() {
        println!(
            "No golden at {:?}; run with UPDATE_GOLDENS=1 to create it. Skipping.",
            expected_path
        );
        return;
    }

    let expected = fs::read_to_string(&expected_path).expect("unable to read golden");
    assert_eq!(digest, expected.trim());
}
