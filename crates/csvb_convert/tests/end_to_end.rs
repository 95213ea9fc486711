// Whole-file conversion checks: parse a realistic C# unit, convert, and
// inspect the rendered VB shape.
use csvb_convert::{convert_text, ConvertOptions};

const SAMPLE: &str = r#"
using System;
using System.Collections.Generic;

namespace Inventory
{
    /// <summary>Tracks stock levels.</summary>
    public class StockTracker : TrackerBase, IDisposable
    {
        private readonly Dictionary<string, int> counts = new Dictionary<string, int>();
        private const int MaxRetries = 0x10;

        public StockTracker(string name) : base(name)
        {
            // start empty
            this.Name = name;
        }

        public string Name { get; set; }

        public int Total()
        {
            int sum = 0;
            for (int i = 0; i < 10; i++)
            {
                sum += i;
            }
            return sum;
        }

        public void Drain(List<int> items)
        {
            foreach (int item in items)
            {
                if (item == 0)
                {
                    continue;
                }
                switch (item)
                {
                    case 1:
                        Record(item);
                        break;
                    default:
                        break;
                }
            }
        }

        public void Dispose()
        {
            counts.Clear();
        }

        private void Record(int value)
        {
            lock (counts)
            {
                counts["total"] = counts["total"] + value;
            }
        }
    }
}
"#;

#[test]
fn converts_a_full_compilation_unit() {
    let output = convert_text(SAMPLE, &ConvertOptions::new()).expect("converts");

    // Imports first.
    assert!(output.starts_with("Imports System\n"), "{output}");
    assert!(output.contains("Imports System.Collections.Generic"), "{output}");

    // Structure.
    assert!(output.contains("Namespace Inventory"), "{output}");
    assert!(output.contains("Public Class StockTracker"), "{output}");
    assert!(output.contains("Inherits TrackerBase"), "{output}");
    assert!(output.contains("Implements IDisposable"), "{output}");
    assert!(output.contains("End Namespace"), "{output}");
    assert!(output.contains("End Class"), "{output}");

    // Doc comment marker swapped.
    assert!(output.contains("''' <summary>Tracks stock levels.</summary>"), "{output}");

    // Members.
    assert!(
        output.contains("Private ReadOnly counts As Dictionary(Of String, Integer)"),
        "{output}"
    );
    assert!(output.contains("Const MaxRetries As Integer = &H10"), "{output}");
    assert!(output.contains("Sub New(name As String)"), "{output}");
    assert!(output.contains("MyBase.New(name)"), "{output}");
    assert!(output.contains("' start empty"), "{output}");
    assert!(output.contains("Public Property Name As String"), "{output}");

    // The counted loop.
    assert!(output.contains("For i As Integer = 0 To 9"), "{output}");
    assert!(output.contains("sum += i"), "{output}");

    // Control flow.
    assert!(output.contains("For Each item As Integer In items"), "{output}");
    assert!(output.contains("If item = 0 Then"), "{output}");
    assert!(output.contains("Continue For"), "{output}");
    assert!(output.contains("Select Case item"), "{output}");
    assert!(output.contains("Case Else"), "{output}");
    assert!(output.contains("SyncLock counts"), "{output}");
    assert!(output.contains("counts(\"total\") = counts(\"total\") + value"), "{output}");
}

#[test]
fn block_structure_is_balanced() {
    let output = convert_text(SAMPLE, &ConvertOptions::new()).expect("converts");
    for (open, close) in [
        ("Namespace ", "End Namespace"),
        ("Class ", "End Class"),
        ("Sub ", "End Sub"),
        ("Select Case ", "End Select"),
        ("SyncLock ", "End SyncLock"),
    ] {
        let opens = output.matches(open).count();
        let closes = output.matches(close).count();
        assert!(
            opens >= closes && closes > 0,
            "unbalanced {open}/{close} in:\n{output}"
        );
    }
}

#[test]
fn snippet_and_statement_inputs_share_the_entry_point() {
    let options = ConvertOptions::new();
    assert_eq!(convert_text("a ?? b", &options).unwrap(), "If(a, b)");
    let statement = convert_text("int x = 5;", &options).unwrap();
    assert_eq!(statement.trim_end(), "Dim x As Integer = 5");
}

#[test]
fn rename_map_applies_across_a_statement() {
    let options = ConvertOptions::with_renames([("total", "grandTotal")]);
    let output = convert_text("total += 1;", &options).unwrap();
    assert!(output.contains("grandTotal += 1"), "{output}");
}

#[test]
fn region_directives_survive_conversion() {
    let source = "class C {\n#region Helpers\n    void M() { }\n#endregion\n}";
    let output = convert_text(source, &ConvertOptions::new()).unwrap();
    assert!(output.contains("#Region \"Helpers\""), "{output}");
    assert!(output.contains("#End Region"), "{output}");
}

#[test]
fn pragma_directive_degrades_to_comment() {
    let source = "class C {\n#pragma warning disable 414\n    int f;\n}";
    let output = convert_text(source, &ConvertOptions::new()).unwrap();
    assert!(output.contains("could not be converted to a"), "{output}");
    assert!(output.contains("' #pragma warning disable 414"), "{output}");
}
