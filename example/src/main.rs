use gmatrix::{fmat, hmat, Element, FixedMatrix, HeapMatrix, MResult, Matrix, RenderOptions};
use log::info;

fn show<T: Element>(name: &str, m: &dyn Matrix<T>) {
    println!("{} {} =", name, m.shape());
    for row in m.render_with(&RenderOptions::default().with_width(4)) {
        println!("| {} |", row.join(" "));
    }
}

fn demo<T: Element>(a: HeapMatrix<T>, b: FixedMatrix<T, 3, 2>) -> MResult<()> {
    show("A", &a);
    show("B", &b);
    let c = (&a + &b)?;
    show("A + B", &c);

    let wrong = HeapMatrix::<T>::new(2, 3)?;
    if let Err(e) = a.combine(&wrong) {
        println!("A + {}: {}", wrong.shape(), e);
    }
    Ok(())
}

fn main() -> MResult<()> {
    env_logger::init();

    info!("f32 matrices");
    demo(
        hmat![[1.5f32, 2.0], [0.0, 1.0], [4.5, 3.0]]?,
        fmat![[0.5f32, 1.0], [2.0, 3.0], [1.0, 1.0]],
    )?;

    info!("i32 matrices");
    let mut a = HeapMatrix::<i32>::new(3, 2)?;
    a.populate(&mut |r, c| (r * 2 + c) as i32)?;
    demo(a, FixedMatrix::from_fn(|r, _| r as i32))?;

    Ok(())
}
