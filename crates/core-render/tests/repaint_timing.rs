use core_render::Renderer;
use core_render::timing::{last_repaint_ns, repaint_count};
use core_state::{LineState, Prompt};

#[test]
fn repaint_records_timing_and_count() {
    let prompt = Prompt::new("> ");
    let old = LineState::from_line("hello world");
    let new = old.delete_word_back();
    let before = repaint_count();
    let mut out = Vec::new();
    Renderer::new().repaint(&mut out, &prompt, &old, &new).unwrap();
    assert!(repaint_count() > before, "repaint must be counted");
    // Tests in this binary run in parallel; any recorded duration is fine.
    let _ = last_repaint_ns();
    assert!(String::from_utf8(out).unwrap().ends_with("> hello "));
}

#[test]
fn prompt_and_hints_written_verbatim() {
    let prompt = Prompt::new("> ");
    let renderer = Renderer::new();
    let mut out = Vec::new();
    renderer.show_prompt(&mut out, &prompt).unwrap();
    renderer
        .show_hints(&mut out, &["a".to_string(), "b".to_string()], 80)
        .unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "> \na  b  \n");
}
