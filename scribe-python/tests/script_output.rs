//! Whole-artifact output checks for the Python vocabulary.

use pretty_assertions::assert_eq;
use scribe_core::{Error, Result, Writer};
use scribe_python::{Class, Def, ForLoop, PythonWriter};

fn rendered(writer: Writer<Vec<u8>>) -> String {
    String::from_utf8(writer.into_sink()).expect("output is utf-8")
}

#[test]
fn renders_classes_functions_and_branches() -> Result<()> {
    let mut writer = Writer::new(Vec::new());

    {
        let mut class = writer.class_def(Class::new("ClassA").parents(["int", "str"]))?;
        let mut init = class.function_def(Def::new("__init__").arg("self").returns("None"))?;
        init.print("pass")?;
    }
    {
        let mut class = writer.class_def(Class::new("ClassB"))?;
        class.print("pass")?;
    }
    {
        let mut main = writer.function_def(Def::new("main"))?;
        let mut branch = main.if_statement("condition 1")?;
        branch.print("pass")?;
        branch.elif_clause("condition 2")?;
        branch.print("pass")?;
        branch.else_clause()?;
        branch.print("pass")?;
    }

    // classes and functions close with a single-space separator line
    assert_eq!(
        rendered(writer),
        concat!(
            "class ClassA(int, str):\n",
            "    def __init__(self) -> None:\n",
            "        pass\n",
            "     \n",
            " \n",
            "class ClassB:\n",
            "    pass\n",
            " \n",
            "def main():\n",
            "    if condition 1:\n",
            "        pass\n",
            "    elif condition 2:\n",
            "        pass\n",
            "    else:\n",
            "        pass\n",
            " \n",
        )
    );
    Ok(())
}

#[test]
fn renders_loops_and_comments() -> Result<()> {
    let mut writer = Writer::new(Vec::new());

    writer.comment("generated file\ndo not edit")?;
    {
        let mut outer = writer.for_loop(ForLoop::range("i", "0", "10", ""))?;
        let mut inner = outer.while_loop("pending")?;
        inner.print("step(i)")?;
    }

    assert_eq!(
        rendered(writer),
        concat!(
            "# generated file\n",
            "# do not edit\n",
            "for i in range(0, 10):\n",
            "    while pending:\n",
            "        step(i)\n",
        )
    );
    Ok(())
}

#[test]
fn elif_outside_any_scope_fails() {
    let mut writer = Writer::new(Vec::new());
    let err = writer.elif_clause("condition").unwrap_err();
    assert!(matches!(err, Error::NoOpenScope));
}

#[test]
fn else_inside_loop_names_the_mismatched_kind() -> Result<()> {
    let mut writer = Writer::new(Vec::new());
    let mut body = writer.while_loop("running")?;
    let err = body.else_clause().unwrap_err();
    assert!(matches!(
        err,
        Error::ScopeKindMismatch {
            expected: "conditional",
            found: "block",
        }
    ));
    Ok(())
}

#[test]
fn else_applies_to_the_innermost_scope_only() -> Result<()> {
    // a loop opened inside the conditional shadows it until the loop closes
    let mut writer = Writer::new(Vec::new());
    let mut branch = writer.if_statement("condition")?;
    {
        let mut body = branch.for_loop(ForLoop::new("x", "items"))?;
        let err = body.else_clause().unwrap_err();
        assert!(matches!(err, Error::ScopeKindMismatch { .. }));
    }
    branch.else_clause()?;
    Ok(())
}
