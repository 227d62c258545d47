#![cfg(unix)]

use std::fs;

use mash_core::command::{Args, Command, CommandResult};
use mash_core::{Context, JobId};
use mash_exec::{Executor, PipelineResult};
use mash_parse::parse;

/// A built-in command reporting a fixed exit code.
struct Marker;

impl Command for Marker {
    fn name(&self) -> &str {
        "marker"
    }

    fn run(&self, _args: &mut Args) -> CommandResult {
        CommandResult::code(7)
    }
}

fn run(line: &str, context: &mut Context) -> PipelineResult {
    Executor::new(Vec::new())
        .execute_pipeline(&parse(line), context)
        .expect("pipeline should execute")
}

fn exit_code(result: PipelineResult) -> i32 {
    match result {
        PipelineResult::Exited(code) => code,
        PipelineResult::Backgrounded { .. } => panic!("expected a foreground exit"),
        PipelineResult::Builtin(_) => panic!("expected an external command"),
    }
}

#[test]
fn it_runs_a_single_command() {
    let mut context = Context::new();
    assert_eq!(exit_code(run("true", &mut context)), 0);
}

#[test]
fn it_reports_a_failing_command() {
    let mut context = Context::new();
    assert_eq!(exit_code(run("false", &mut context)), 1);
}

#[test]
fn it_skips_empty_pipelines() {
    let mut context = Context::new();
    assert_eq!(exit_code(run("", &mut context)), 0);
}

#[test]
fn it_redirects_output_to_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");
    let mut context = Context::new();

    let line = format!("echo hi > {}", path.display());
    assert_eq!(exit_code(run(&line, &mut context)), 0);

    assert_eq!(fs::read_to_string(&path).unwrap(), "hi\n");
}

#[test]
fn it_truncates_on_repeated_redirection() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");
    let mut context = Context::new();

    run(&format!("echo first > {}", path.display()), &mut context);
    run(&format!("echo second > {}", path.display()), &mut context);

    assert_eq!(fs::read_to_string(&path).unwrap(), "second\n");
}

#[test]
fn it_appends_with_repeated_redirection() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("log.txt");
    let mut context = Context::new();

    let line = format!("echo hi >> {}", path.display());
    run(&line, &mut context);
    run(&line, &mut context);

    assert_eq!(fs::read_to_string(&path).unwrap(), "hi\nhi\n");
}

#[test]
fn it_redirects_input_from_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.txt");
    let output = dir.path().join("out.txt");
    fs::write(&input, "hello\n").unwrap();
    let mut context = Context::new();

    let line = format!("cat < {} > {}", input.display(), output.display());
    assert_eq!(exit_code(run(&line, &mut context)), 0);

    assert_eq!(fs::read_to_string(&output).unwrap(), "hello\n");
}

#[test]
fn it_connects_pipeline_stages() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");
    let mut context = Context::new();

    // A leaked write end on either pipe would keep a `cat` from ever seeing
    // end-of-input, making this test hang instead of completing.
    let line = format!("echo hello | cat | cat > {}", path.display());
    assert_eq!(exit_code(run(&line, &mut context)), 0);

    assert_eq!(fs::read_to_string(&path).unwrap(), "hello\n");
}

#[test]
fn it_merges_stderr_into_the_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");
    let mut context = Context::new();

    let line = format!("cat definitely-absent-file > {}", path.display());
    assert_eq!(exit_code(run(&line, &mut context)), 1);

    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.contains("definitely-absent-file"));
}

#[test]
fn it_continues_after_a_failed_stage() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");
    let mut context = Context::new();

    // The first stage never spawns. The downstream stage must still run and
    // observe closed input instead of hanging.
    let line = format!("definitely-not-a-command | cat > {}", path.display());
    assert_eq!(exit_code(run(&line, &mut context)), 1);

    assert_eq!(fs::read_to_string(&path).unwrap(), "");
}

#[test]
fn it_reports_missing_input_files() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("absent.txt");
    let output = dir.path().join("out.txt");
    let mut context = Context::new();

    let line = format!("cat < {} > {}", input.display(), output.display());
    assert_eq!(exit_code(run(&line, &mut context)), 1);

    // The stage aborts before its output file is opened.
    assert!(!output.exists());
}

#[test]
fn it_backgrounds_a_pipeline() {
    let mut context = Context::new();

    let PipelineResult::Backgrounded { id, pid } = run("sleep 5 &", &mut context) else {
        panic!("expected a background registration");
    };

    assert_eq!(id, JobId(1));
    let job = context.jobs.get(id).expect("job is registered");
    assert_eq!(job.pid(), pid);
    assert_eq!(job.description(), "sleep 5");

    context.jobs.terminate(id).unwrap();
}

#[test]
fn it_tracks_only_the_first_stage_of_a_background_pipeline() {
    let mut context = Context::new();

    let PipelineResult::Backgrounded { id, .. } = run("sleep 0.3 | sleep 0.4 &", &mut context)
    else {
        panic!("expected a background registration");
    };

    assert_eq!(context.jobs.len(), 1);
    let job = context.jobs.get(id).expect("job is registered");
    assert_eq!(job.description(), "sleep 0.3 | sleep 0.4");

    context.jobs.terminate(id).unwrap();
}

#[test]
fn it_dispatches_builtins_in_single_stages() {
    let mut context = Context::new();
    let executor = Executor::new(vec![Box::new(Marker)]);

    let result = executor
        .execute_pipeline(&parse("marker"), &mut context)
        .unwrap();

    let PipelineResult::Builtin(result) = result else {
        panic!("expected a built-in dispatch");
    };
    assert_eq!(result.code, 7);
    assert!(executor.is_builtin("marker"));
}

#[test]
fn it_ignores_builtins_inside_pipelines() {
    let mut context = Context::new();
    let executor = Executor::new(vec![Box::new(Marker)]);

    // Multi-stage pipelines spawn OS processes only. The unknown program
    // "marker" fails to spawn and the pipeline completes with an error.
    let result = executor
        .execute_pipeline(&parse("marker | cat"), &mut context)
        .unwrap();

    assert!(matches!(result, PipelineResult::Exited(1)));
}
