use shapecalc_core::{Action, NumberFormat, ShapeForm, ShapeKind};

#[test]
fn test_circle_area_perimeter() {
    let mut form = ShapeForm::default();
    form.select("Circle");
    form.set_field(0, "2");
    assert_eq!(
        form.calculate_area_perimeter(),
        "Area: 12.5664\nPerimeter: 12.5664"
    );
    assert_eq!(form.result(), "Area: 12.5664\nPerimeter: 12.5664");
}

#[test]
fn test_volume_button_for_solids() {
    let mut form = ShapeForm::default();
    form.select("Cone");
    assert_eq!(form.layout().action, Action::Volume);
    assert_eq!(form.layout().visible_fields(), 2);

    form.set_fields(&["2", "6"]);
    assert_eq!(form.calculate(), "Volume: 25.1327");
}

#[test]
fn test_trapezoid_shows_all_five_fields() {
    let mut form = ShapeForm::default();
    form.select("Trapezoid");
    let labels: Vec<_> = form.layout().fields.iter().map(|f| f.label).collect();
    assert_eq!(labels, ["Base1", "Base2", "Height", "Side1", "Side2"]);

    form.set_fields(&["4", "6", "3", "3.5", "3.5"]);
    assert_eq!(form.calculate_area_perimeter(), "Area: 15\nPerimeter: 17");
}

#[test]
fn test_empty_fields_are_skipped() {
    let mut form = ShapeForm::default();
    form.select("Rectangle");
    form.set_field(0, "3");
    form.set_field(2, "5");
    assert_eq!(form.calculate_area_perimeter(), "Area: 15\nPerimeter: 16");
}

#[test]
fn test_invalid_inputs() {
    let mut form = ShapeForm::default();
    form.select("Square");

    form.set_field(0, "abc");
    assert_eq!(form.calculate_area_perimeter(), "Invalid parameters");

    form.set_field(0, "-1");
    assert_eq!(form.calculate_area_perimeter(), "Invalid parameters");

    form.clear_fields();
    assert_eq!(form.calculate_area_perimeter(), "Invalid parameters");

    form.set_fields(&["4", "4"]);
    assert_eq!(form.calculate_area_perimeter(), "Invalid parameters");
}

#[test]
fn test_wrong_button_for_dimension() {
    let mut form = ShapeForm::default();
    form.select("Sphere");
    form.set_field(0, "3");
    assert_eq!(form.calculate_area_perimeter(), "Not applicable for 3D shapes");
    assert_eq!(form.calculate_volume(), "Volume: 113.097");
}

#[test]
fn test_precision_setting() {
    let mut form = ShapeForm::new(ShapeKind::Circle, NumberFormat::new(3));
    form.set_field(0, "1");
    assert_eq!(form.calculate(), "Area: 3.14\nPerimeter: 6.28");
}

#[test]
fn test_switching_shapes_updates_labels() {
    let mut form = ShapeForm::default();
    assert_eq!(form.layout().fields[0].label, "Side Length");
    form.select("Triangle3");
    assert_eq!(form.layout().visible_fields(), 3);
    assert_eq!(form.layout().fields[2].label, "Side C");
    form.select("Sphere");
    assert_eq!(form.layout().visible_fields(), 1);
    assert_eq!(form.layout().fields[0].label, "Radius");
}
