use crate::{convert_text, convert_tree, ConvertOptions};

fn convert(source: &str) -> String {
    convert_text(source, &ConvertOptions::new()).expect("conversion succeeds")
}

// -- for lowering -----------------------------------------------------------

#[test]
fn simple_for_counts_up_with_adjusted_bound() {
    let output = convert("for (int i = 0; i < 10; i++) { sum += i; }");
    assert!(output.contains("For i As Integer = 0 To 9"), "{output}");
    assert!(output.contains("sum += i"), "{output}");
    assert!(output.contains("Next"), "{output}");
    assert!(!output.contains("Step"), "{output}");
}

#[test]
fn simple_for_inclusive_bound_is_untouched() {
    let output = convert("for (int i = 0; i <= 10; i++) { }");
    assert!(output.contains("For i As Integer = 0 To 10"), "{output}");
}

#[test]
fn simple_for_counts_down_with_compound_step() {
    let output = convert("for (int i = 10; i >= 0; i -= 2) { }");
    assert!(output.contains("For i As Integer = 10 To 0 Step -2"), "{output}");
}

#[test]
fn simple_for_decrement_gets_minus_one_step() {
    let output = convert("for (int i = 5; i > 0; i--) { }");
    assert!(output.contains("For i As Integer = 5 To 1 Step -1"), "{output}");
}

#[test]
fn simple_for_with_var_omits_as_clause() {
    let output = convert("for (var i = 0; i < 3; i++) { }");
    assert!(output.contains("For i = 0 To 2"), "{output}");
}

#[test]
fn simple_for_compound_add_keeps_step_expression() {
    let output = convert("for (int i = 0; i < n; i += delta) { }");
    assert!(output.contains("For i As Integer = 0 To n - 1 Step delta"), "{output}");
}

#[test]
fn complex_for_with_two_incrementors_lowers_to_while() {
    let output = convert("for (int i = 0; i < 10; i++, j++) { Use(i); }");
    assert!(output.contains("Dim i As Integer = 0"), "{output}");
    assert!(output.contains("While i < 10"), "{output}");
    assert!(output.contains("Use(i)"), "{output}");
    // Incrementors append after the body, in order.
    let body_pos = output.find("Use(i)").unwrap();
    let i_pos = output.find("i += 1").unwrap();
    let j_pos = output.find("j += 1").unwrap();
    assert!(body_pos < i_pos && i_pos < j_pos, "{output}");
    assert!(output.contains("End While"), "{output}");
}

#[test]
fn complex_for_without_condition_loops_forever() {
    let output = convert("for (;;) { Tick(); }");
    assert!(output.contains("While True"), "{output}");
}

#[test]
fn complex_for_with_non_comparison_condition() {
    let output = convert("for (int i = 0; Keep(i); i++) { }");
    assert!(output.contains("While Keep(i)"), "{output}");
    assert!(output.contains("i += 1"), "{output}");
}

#[test]
fn for_with_declared_custom_type_is_complex() {
    let output = convert("for (MyCounter i = Start(); i < 10; i++) { }");
    assert!(output.contains("While i < 10"), "{output}");
    assert!(!output.contains("For i"), "{output}");
}

// -- operators and assignments ----------------------------------------------

#[test]
fn compound_bitwise_assignment_desugars() {
    assert!(convert("x &= y;").contains("x = x And y"));
    assert!(convert("x ^= y;").contains("x = x Xor y"));
    assert!(convert("x |= y;").contains("x = x Or y"));
    assert!(convert("x %= y;").contains("x = x Mod y"));
    assert!(convert("x <<= 2;").contains("x = x << 2"));
    assert!(convert("x >>= 2;").contains("x = x >> 2"));
}

#[test]
fn compound_arithmetic_assignment_maps_directly() {
    assert!(convert("x += y;").contains("x += y"));
    assert!(convert("x -= y;").contains("x -= y"));
    assert!(convert("x *= y;").contains("x *= y"));
    assert!(convert("x /= y;").contains("x /= y"));
}

#[test]
fn null_comparison_becomes_is_nothing() {
    assert_eq!(convert("x == null"), "x Is Nothing");
    assert_eq!(convert("x != null"), "x IsNot Nothing");
    assert_eq!(convert("null == x"), "Nothing Is x");
    assert_eq!(convert("x == y"), "x = y");
    assert_eq!(convert("x != y"), "x <> y");
}

#[test]
fn short_circuit_operators_map_to_also_forms() {
    assert_eq!(convert("a && b"), "a AndAlso b");
    assert_eq!(convert("a || b"), "a OrElse b");
    assert_eq!(convert("a & b"), "a And b");
    assert_eq!(convert("a | b"), "a Or b");
    assert_eq!(convert("a ^ b"), "a Xor b");
    assert_eq!(convert("a % b"), "a Mod b");
    assert_eq!(convert("!a"), "Not a");
}

#[test]
fn ternary_and_coalesce_lower_to_if_intrinsic() {
    assert_eq!(convert("c ? a : b"), "If(c, a, b)");
    assert_eq!(convert("a ?? b"), "If(a, b)");
}

#[test]
fn increment_statements_become_compound_assignments() {
    assert!(convert("i++;").contains("i += 1"));
    assert!(convert("--i;").contains("i -= 1"));
}

// -- literals and identifiers -----------------------------------------------

#[test]
fn hex_literal_gets_vb_prefix() {
    assert_eq!(convert("0x1f"), "&H1F");
}

#[test]
fn char_literal_gets_c_suffix() {
    assert_eq!(convert("'a'"), "\"a\"c");
}

#[test]
fn string_quotes_are_doubled() {
    assert_eq!(convert("\"say \\\"hi\\\"\""), "\"say \"\"hi\"\"\"");
}

#[test]
fn multi_line_verbatim_string_concatenates() {
    assert_eq!(convert("@\"a\nb\""), "\"a\" & vbCrLf & \"b\"");
}

#[test]
fn reserved_word_identifier_is_bracketed() {
    assert_eq!(convert("Class"), "[Class]");
}

#[test]
fn identifier_after_dot_is_not_bracketed() {
    assert_eq!(convert("x.Class"), "x.Class");
}

#[test]
fn rename_map_substitutes_identifiers() {
    let options = ConvertOptions::with_renames([("oldName", "newName")]);
    assert_eq!(convert_text("oldName + 1", &options).unwrap(), "newName + 1");
}

// -- expressions ------------------------------------------------------------

#[test]
fn type_tests_and_casts() {
    assert_eq!(convert("e is Widget"), "TypeOf e Is Widget");
    assert_eq!(convert("e as Widget"), "TryCast(e, Widget)");
    assert_eq!(convert("(Widget)e"), "CType(e, Widget)");
    assert_eq!(convert("typeof(int)"), "GetType(Integer)");
    assert_eq!(convert("default(int)"), "CType(Nothing, Integer)");
    assert_eq!(convert("nameof(x)"), "NameOf(x)");
}

#[test]
fn this_and_base_map_to_me_and_mybase() {
    assert_eq!(convert("this.value"), "Me.value");
    assert_eq!(convert("base.Render()"), "MyBase.Render()");
}

#[test]
fn checked_expressions_become_synthetic_calls() {
    assert_eq!(convert("checked(a + b)"), "Checked(a + b)");
    assert_eq!(convert("unchecked(a + b)"), "Unchecked(a + b)");
    assert_eq!(convert("__makeref(v)"), "MakeRef(v)");
}

#[test]
fn stackalloc_produces_diagnostic_placeholder() {
    let output = convert("stackalloc int[10]");
    assert!(output.contains("could not be converted to a"), "{output}");
    assert!(output.contains("stackalloc int[10]"), "{output}");
}

#[test]
fn element_access_uses_parentheses() {
    assert_eq!(convert("items[3]"), "items(3)");
}

#[test]
fn object_initializer_becomes_with_block() {
    assert_eq!(
        convert("new Point { X = 1, Y = 2 }"),
        "New Point() With {.X = 1, .Y = 2}"
    );
}

#[test]
fn collection_initializer_becomes_from_block() {
    assert_eq!(
        convert("new List<int> { 1, 2 }"),
        "New List(Of Integer)() From {1, 2}"
    );
}

#[test]
fn anonymous_object_keeps_named_and_inferred_members() {
    assert_eq!(
        convert("new { Name = n, c.Age }"),
        "New With {.Name = n, c.Age}"
    );
}

#[test]
fn array_creation_adjusts_to_upper_bound() {
    assert_eq!(convert("new int[5]"), "New Integer(4) {}");
    assert_eq!(convert("new int[n]"), "New Integer(n - 1) {}");
}

#[test]
fn lambda_expression_body_renders_inline() {
    assert_eq!(convert("x => x * 2"), "Function(x) x * 2");
}

#[test]
fn interpolated_string_converts_parts() {
    assert_eq!(convert("$\"x = {x}!\""), "$\"x = {x}!\"");
}

#[test]
fn query_expression_maps_clause_by_clause() {
    assert_eq!(
        convert("from c in customers where c.Age > 21 orderby c.Name descending select c.Name"),
        "From c In customers Where c.Age > 21 Order By c.Name Descending Select c.Name"
    );
}

#[test]
fn group_by_without_continuation_omits_range_variable() {
    assert_eq!(
        convert("from x in xs group x by x.Key"),
        "From x In xs Group x By x.Key Into Group"
    );
}

#[test]
fn group_by_with_continuation_names_the_aggregation() {
    let output = convert("from x in xs group x by x.Key into g select g");
    assert_eq!(output, "From x In xs Group x By x.Key Into g = Group Select g");
}

#[test]
fn join_with_into_becomes_group_join() {
    let output =
        convert("from a in xs join b in ys on a.Id equals b.Id into grp select grp");
    assert!(output.contains("Group Join b In ys On a.Id Equals b.Id Into grp = Group"));
}

// -- statements -------------------------------------------------------------

#[test]
fn break_inside_switch_inside_while_exits_select() {
    let output = convert("while (a) { switch (b) { case 1: if (c) break; break; } }");
    assert!(output.contains("Exit Select"), "{output}");
    assert!(!output.contains("Exit While"), "{output}");
}

#[test]
fn trailing_break_in_switch_section_is_dropped() {
    let output = convert("switch (x) { case 1: Work(); break; }");
    assert!(output.contains("Case 1"), "{output}");
    assert!(output.contains("Work()"), "{output}");
    assert!(!output.contains("Exit Select"), "{output}");
}

#[test]
fn continue_skips_the_switch() {
    let output = convert("while (a) { switch (b) { case 1: continue; } }");
    assert!(output.contains("Continue While"), "{output}");
}

#[test]
fn orphan_break_degrades_to_placeholder() {
    let output = convert("break;");
    assert!(output.contains("could not be converted to a"), "{output}");
}

#[test]
fn default_label_becomes_case_else() {
    let output = convert("switch (x) { default: Fallback(); break; }");
    assert!(output.contains("Case Else"), "{output}");
}

#[test]
fn goto_forms() {
    assert!(convert("goto done;").contains("GoTo done"));
    assert!(convert("goto case 3;").contains("GoTo Case3"));
    assert!(convert("goto default;").contains("GoTo CaseElse"));
}

#[test]
fn do_while_becomes_post_test_loop() {
    let output = convert("do { Pump(); } while (more);");
    assert!(output.starts_with("Do"), "{output}");
    assert!(output.contains("Loop While more"), "{output}");
}

#[test]
fn foreach_maps_to_for_each() {
    let output = convert("foreach (string name in names) { Print(name); }");
    assert!(output.contains("For Each name As String In names"), "{output}");
    assert!(output.trim_end().ends_with("Next"), "{output}");
}

#[test]
fn else_if_chain_flattens() {
    let output = convert("if (a) { X(); } else if (b) { Y(); } else { Z(); }");
    assert!(output.contains("If a Then"), "{output}");
    assert!(output.contains("ElseIf b Then"), "{output}");
    assert!(output.contains("Else\n"), "{output}");
    assert!(output.contains("End If"), "{output}");
}

#[test]
fn using_variants_produce_different_headers() {
    let output = convert("using (var reader = Open()) { }");
    assert!(output.contains("Using reader = Open()"), "{output}");
    let output = convert("using (stream) { }");
    assert!(output.contains("Using stream"), "{output}");
}

#[test]
fn lock_becomes_synclock() {
    let output = convert("lock (gate) { Enter(); }");
    assert!(output.contains("SyncLock gate"), "{output}");
    assert!(output.contains("End SyncLock"), "{output}");
}

#[test]
fn catch_without_name_synthesizes_identifier() {
    let output = convert("try { Risky(); } catch (IOException) { } catch { }");
    assert!(output.contains("Catch __unused As IOException"), "{output}");
    assert!(output.contains("Catch\n"), "{output}");
}

#[test]
fn catch_filter_becomes_when_clause() {
    let output = convert("try { } catch (Exception e) when (e.Code > 1) { }");
    assert!(output.contains("Catch e As Exception When e.Code > 1"), "{output}");
}

#[test]
fn yield_approximates_as_return() {
    assert!(convert("yield return item;").contains("Return item"));
    assert_eq!(convert("yield break;").trim_end(), "Return");
}

#[test]
fn unchecked_statement_unwraps_to_body() {
    let output = convert("unchecked { total = total + 1; }");
    assert_eq!(output.trim_end(), "total = total + 1");
}

#[test]
fn comment_trivia_survives_statement_conversion() {
    let output = convert("// add one\nx += 1;");
    assert!(output.starts_with("' add one\n"), "{output}");
    assert!(output.contains("x += 1"), "{output}");
}

#[test]
fn trailing_comment_stays_on_the_line() {
    let output = convert("x += 1; // bump");
    assert!(output.contains("x += 1 ' bump"), "{output}");
}

// -- declarations -----------------------------------------------------------

#[test]
fn static_class_reclassifies_as_module() {
    let output = convert("public static class Util { }");
    assert!(output.contains("Public Module Util"), "{output}");
    assert!(output.contains("End Module"), "{output}");
    assert!(!output.contains("Shared Module"), "{output}");
}

#[test]
fn base_list_heuristic_splits_inherits_and_implements() {
    let output = convert("class Widget : Control, IDisposable { }");
    assert!(output.contains("Inherits Control"), "{output}");
    assert!(output.contains("Implements IDisposable"), "{output}");

    let output = convert("class Widget : IDisposable, ICloneable { }");
    assert!(!output.contains("Inherits"), "{output}");
    assert!(output.contains("Implements IDisposable, ICloneable"), "{output}");
}

#[test]
fn void_method_becomes_sub_and_value_method_function() {
    let output = convert(
        "class C { public void Reset() { } public int Total() { return 0; } }",
    );
    assert!(output.contains("Public Sub Reset()"), "{output}");
    assert!(output.contains("End Sub"), "{output}");
    assert!(output.contains("Public Function Total() As Integer"), "{output}");
    assert!(output.contains("End Function"), "{output}");
}

#[test]
fn extension_method_drops_shared_and_gains_attribute() {
    let output = convert(
        "public static class Ext { public static int Len(this string s) { return s.Length; } }",
    );
    assert!(output.contains("<Extension()>"), "{output}");
    assert!(output.contains("Public Function Len(s As String) As Integer"), "{output}");
    assert!(!output.contains("Shared"), "{output}");
}

#[test]
fn abstract_maps_per_position() {
    let output = convert("abstract class Shape { public abstract int Area(); }");
    assert!(output.contains("MustInherit Class Shape"), "{output}");
    assert!(output.contains("Public MustOverride Function Area() As Integer"), "{output}");
    // No body, so no End Function after the MustOverride line.
    let must_override_line = output
        .lines()
        .find(|line| line.contains("MustOverride"))
        .unwrap();
    assert!(must_override_line.contains("Area"));
}

#[test]
fn single_accessor_property_gains_direction_modifier() {
    let output = convert(
        "class C { public int Count { get { return c; } } public int Limit { set { l = value; } } }",
    );
    assert!(output.contains("Public ReadOnly Property Count As Integer"), "{output}");
    assert!(output.contains("Public WriteOnly Property Limit As Integer"), "{output}");
    assert!(output.contains("End Get"), "{output}");
    assert!(output.contains("End Set"), "{output}");
}

#[test]
fn auto_property_stays_single_line() {
    let output = convert("class C { public int Count { get; set; } }");
    assert!(output.contains("Public Property Count As Integer"), "{output}");
    assert!(!output.contains("End Property"), "{output}");
}

#[test]
fn indexer_becomes_default_item_property() {
    let output = convert(
        "class C { public string this[int index] { get { return items[index]; } } }",
    );
    assert!(output.contains("Default Property Item(index As Integer) As String"), "{output}");
}

#[test]
fn operator_table_maps_symbols() {
    let output = convert(
        "class M { public static bool operator ==(M a, M b) { return true; } public static bool operator !=(M a, M b) { return false; } public static M operator %(M a, M b) { return a; } }",
    );
    assert!(output.contains("Operator =("), "{output}");
    assert!(output.contains("Operator <>("), "{output}");
    assert!(output.contains("Operator Mod("), "{output}");
}

#[test]
fn increment_operator_gets_pseudo_name() {
    let output =
        convert("class M { public static M operator ++(M a) { return a; } }");
    assert!(output.contains("Operator op_Increment("), "{output}");
}

#[test]
fn conversion_operators_become_widening_and_narrowing() {
    let output = convert(
        "class Money { public static implicit operator Money(int cents) { return null; } public static explicit operator int(Money m) { return 0; } }",
    );
    assert!(output.contains("Widening Operator CType(cents As Integer) As Money"), "{output}");
    assert!(output.contains("Narrowing Operator CType(m As Money) As Integer"), "{output}");
}

#[test]
fn constructor_initializer_prepends_chain_call() {
    let output = convert(
        "class C : B { public C(int x) : base(x) { Init(); } }",
    );
    let base_pos = output.find("MyBase.New(x)").expect("chain call present");
    let init_pos = output.find("Init()").expect("body present");
    assert!(base_pos < init_pos, "{output}");
    assert!(output.contains("Sub New(x As Integer)"), "{output}");
}

#[test]
fn destructor_becomes_finalize_override() {
    let output = convert("class C { ~C() { Release(); } }");
    assert!(output.contains("Protected Overrides Sub Finalize()"), "{output}");
}

#[test]
fn usings_become_imports() {
    let output = convert("using System;\nusing IO = System.IO;\nclass C { }");
    assert!(output.starts_with("Imports System\n"), "{output}");
    assert!(output.contains("Imports IO = System.IO"), "{output}");
}

#[test]
fn assembly_attributes_emit_attribute_statement() {
    let output = convert("[assembly: ComVisible(false)]\nclass C { }");
    assert!(output.contains("<Assembly: ComVisible(False)>"), "{output}");
}

#[test]
fn enum_members_carry_values() {
    let output = convert("enum Color { Red, Green = 5 }");
    assert!(output.contains("Enum Color"), "{output}");
    assert!(output.contains("Green = 5"), "{output}");
    assert!(output.contains("End Enum"), "{output}");
}

#[test]
fn delegate_maps_to_sub_or_function() {
    let output = convert("public delegate void Notify(int code);\npublic delegate int Combine(int a, int b);");
    assert!(output.contains("Public Delegate Sub Notify(code As Integer)"), "{output}");
    assert!(output.contains("Public Delegate Function Combine(a As Integer, b As Integer) As Integer"), "{output}");
}

#[test]
fn convert_tree_returns_typed_unit() {
    let source = "class C { void M() { } }";
    let unit = csvb_parser::parse_compilation_unit(source).unwrap();
    let converted = convert_tree(&unit, source, &ConvertOptions::new()).unwrap();
    assert_eq!(converted.members.len(), 1);
}
