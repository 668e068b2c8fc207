use jono::{dyn_array, CapacityError, DynArray, SortedQueue};

fn main() -> Result<(), CapacityError> {
    let mut numbers: DynArray<i32> = dyn_array![2, 3, 5, 7];
    println!("numbers:  {}", numbers);
    numbers.push(11)?;
    println!("appended: {}", numbers);
    numbers.pop_front();
    println!("popped:   {}", numbers);
    numbers.assign(3, 1)?;
    println!("assigned: {}", numbers);

    let mut letters = dyn_array!['j', 'o', 'n', 'o'];
    letters[0] = 'J';
    letters.push('!')?;
    println!("letters:  {}", letters);
    println!("front {:?}, back {:?}", letters.front(), letters.back());

    let mut words: DynArray<String> = ["hello", "world"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    words[0].push(',');
    let last = words.len() - 1;
    words[last].push('!');
    println!("words:    {}", words);

    let mut queue = SortedQueue::new();
    queue.push(1)?;
    queue.push(2)?;
    queue.push(3)?;
    print!("queue drains: ");
    while let Some(value) = queue.pop() {
        print!("{} ", value);
    }
    println!();
    Ok(())
}
