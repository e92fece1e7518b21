use crate::views::{escape, layout};
use biz_service::entitys::client_entity::ClientInfo;
use biz_service::entitys::meal_entity::MealInfo;
use common::util::date_util::time_to_str;

pub fn client_list(clients: &[ClientInfo]) -> String {
    let mut rows = String::new();
    for c in clients {
        rows.push_str(&format!(
            "<tr><td>{id}</td><td><a href=\"/clients/{id}\">{name}</a></td><td>{age}</td><td>{weight}</td><td>{desired}</td><td>{meals}</td></tr>\n",
            id = c.id,
            name = escape(&c.name),
            age = escape(&c.age),
            weight = escape(&c.weight),
            desired = escape(&c.desired_weight),
            meals = c.meals.len(),
        ));
    }
    let content = if clients.is_empty() {
        "<h1>Clients</h1>\n<p>No clients yet. <a href=\"/clients/add\">Add one</a>.</p>".to_string()
    } else {
        format!(
            "<h1>Clients</h1>\n<table>\n<tr><th>ID</th><th>Name</th><th>Age</th><th>Weight</th><th>Desired Weight</th><th>Meals</th></tr>\n{}</table>",
            rows
        )
    };
    layout("Clients", &content)
}

pub fn add_client_form() -> String {
    let mut fields = String::new();
    for (name, label) in [
        ("name", "Name"),
        ("age", "Age"),
        ("height", "Height"),
        ("weight", "Weight"),
        ("activity", "Activity Level"),
        ("desired_weight", "Desired Weight"),
    ] {
        fields.push_str(&format!(
            "<p><label for=\"{name}\">{label}</label> <input type=\"text\" id=\"{name}\" name=\"{name}\"></p>\n"
        ));
    }
    let content = format!(
        "<h1>Add Client</h1>\n<form method=\"post\" action=\"/clients/add\">\n{}<button type=\"submit\">Add Client</button>\n</form>",
        fields
    );
    layout("Add Client", &content)
}

fn meal_item(meal: &MealInfo) -> String {
    let nutrients: String = meal
        .nutrients
        .iter()
        .map(|n| format!("<li>{}: {}</li>", escape(&n.name), escape(&n.amount)))
        .collect();
    format!(
        "<li class=\"meal\">\n<img src=\"/static/{image}\" alt=\"meal\" width=\"240\">\n<p>Uploaded {time}</p>\n<ul>{nutrients}</ul>\n<p>{recommendation}</p>\n</li>\n",
        image = escape(&meal.image),
        time = time_to_str(meal.upload_time),
        nutrients = nutrients,
        recommendation = escape(&meal.recommendation),
    )
}

pub fn client_detail(client: &ClientInfo) -> String {
    let meals = if client.meals.is_empty() {
        "<p>No meals uploaded yet.</p>".to_string()
    } else {
        format!("<ol>\n{}</ol>", client.meals.iter().map(meal_item).collect::<String>())
    };
    let content = format!(
        r#"<h1>{name}</h1>
<dl>
<dt>Age</dt><dd>{age}</dd>
<dt>Height</dt><dd>{height}</dd>
<dt>Weight</dt><dd>{weight}</dd>
<dt>Activity Level</dt><dd>{activity}</dd>
<dt>Desired Weight</dt><dd>{desired}</dd>
</dl>
<h2>Upload Meal</h2>
<form method="post" action="/clients/{id}" enctype="multipart/form-data">
<input type="file" name="file" accept="image/*">
<button type="submit">Upload</button>
</form>
<h2>Meals</h2>
{meals}"#,
        id = client.id,
        name = escape(&client.name),
        age = escape(&client.age),
        height = escape(&client.height),
        weight = escape(&client.weight),
        activity = escape(&client.activity),
        desired = escape(&client.desired_weight),
        meals = meals,
    );
    layout(&client.name, &content)
}
