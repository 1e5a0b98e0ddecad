use anyhow::{anyhow, Context, Result};
use colored::*;
use serde_json::{json, Value};
use std::io::{self, Write};

#[tokio::main]
async fn main() -> Result<()> {
    println!("{}", "🌱 EcoNest Trip Tracker - Testing Tool".bright_green().bold());
    println!("{}", "=======================================".bright_green());
    println!();

    let base_url = std::env::var("ECONEST_API_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
    let client = reqwest::Client::new();

    // Paso 1: Verificar que la API responde
    check_health(&client, &base_url).await?;

    // Paso 2: Menú principal
    loop {
        println!();
        println!("{}", "📋 MENÚ PRINCIPAL".bright_green().bold());
        println!("{}", "==================".bright_green());
        println!("1. 🧮 Calcular emisiones de un trayecto");
        println!("2. 🏁 Terminar viaje (registrar)");
        println!("3. 📜 Ver historial de viajes");
        println!("4. 🚗 Ver catálogo de vehículos");
        println!("5. 🚪 Salir");
        print!("{}", "Selecciona una opción (1-5): ".bright_yellow());
        io::stdout().flush()?;

        let choice = read_line()?;

        let result = match choice.as_str() {
            "1" => calculate_trip(&client, &base_url).await,
            "2" => end_trip(&client, &base_url).await,
            "3" => show_history(&client, &base_url).await,
            "4" => show_catalog(&client, &base_url).await,
            "5" => {
                println!("{}", "👋 ¡Hasta luego!".bright_green());
                break;
            }
            _ => {
                println!("{}", "❌ Opción inválida. Intenta de nuevo.".bright_red());
                Ok(())
            }
        };

        if let Err(e) = result {
            println!("{}", format!("❌ Error: {:#}", e).bright_red());
        }
    }

    Ok(())
}

fn read_line() -> Result<String> {
    let mut value = String::new();
    io::stdin().read_line(&mut value)?;
    Ok(value.trim().to_string())
}

fn prompt(label: &str) -> Result<String> {
    print!("{}", label.bright_yellow());
    io::stdout().flush()?;
    read_line()
}

/// Pedir categoría y modelo; un modelo vacío usa el de la categoría
fn prompt_vehicle() -> Result<(String, Option<String>)> {
    let category = prompt("Tipo de vehículo (car, bike, rickshaw, bus, metro): ")?;
    let model = prompt("Modelo (vacío = modelo por defecto): ")?;
    let model = if model.is_empty() { None } else { Some(model) };
    Ok((category, model))
}

async fn send_json(request: reqwest::RequestBuilder) -> Result<Value> {
    let response = request.send().await.context("No se pudo conectar con la API")?;
    let status = response.status();
    let body: Value = response.json().await.context("Respuesta no es JSON")?;

    if !status.is_success() {
        return Err(anyhow!(
            "{} - {}",
            status,
            body.get("message").and_then(Value::as_str).unwrap_or("sin mensaje")
        ));
    }
    Ok(body)
}

async fn check_health(client: &reqwest::Client, base_url: &str) -> Result<()> {
    let body = send_json(client.get(format!("{}/health", base_url))).await?;
    println!(
        "{}",
        format!(
            "✅ API disponible en {} ({} modelos en catálogo)",
            base_url, body["vehicle_models"]
        )
        .bright_green()
    );
    Ok(())
}

async fn calculate_trip(client: &reqwest::Client, base_url: &str) -> Result<()> {
    println!();
    println!("{}", "🧮 CALCULAR TRAYECTO".bright_cyan().bold());
    println!("{}", "====================".bright_cyan());

    let distance: f64 = prompt("Distancia (km): ")?
        .parse()
        .context("La distancia debe ser un número")?;
    let (category, model) = prompt_vehicle()?;

    let payload = json!({
        "distance_km": distance,
        "vehicle_category": category,
        "model_name": model,
    });

    let body = send_json(client.post(format!("{}/api/trip/calculate", base_url)).json(&payload)).await?;
    let data = &body["data"];

    println!();
    println!("{} {}", "Modelo usado:".bright_blue(), data["resolved_model_name"]);
    if data["fallback_used"].as_bool().unwrap_or(false) {
        println!("{}", "⚠️ Modelo no encontrado, se usó el de la categoría".bright_yellow());
    }
    println!(
        "{} {} {}",
        "Consumo:".bright_blue(),
        data["fuel_or_energy_used"],
        data["consumption_unit"].as_str().unwrap_or("")
    );
    println!("{} {} kg CO₂e", "Emisiones:".bright_blue(), data["carbon_emitted_kg"]);
    Ok(())
}

async fn end_trip(client: &reqwest::Client, base_url: &str) -> Result<()> {
    println!();
    println!("{}", "🏁 TERMINAR VIAJE".bright_cyan().bold());
    println!("{}", "=================".bright_cyan());

    let destination = prompt("Destino: ")?;
    let (category, model) = prompt_vehicle()?;

    let payload = json!({
        "destination": destination,
        "vehicle_category": category,
        "model_name": model,
    });

    let body = send_json(client.post(format!("{}/api/trip", base_url)).json(&payload)).await?;
    let trip = &body["data"];

    println!();
    println!("{}", "✅ VIAJE REGISTRADO".bright_green().bold());
    print_trip(trip);
    Ok(())
}

async fn show_history(client: &reqwest::Client, base_url: &str) -> Result<()> {
    println!();
    println!("{}", "📜 HISTORIAL DE VIAJES".bright_cyan().bold());
    println!("{}", "======================".bright_cyan());

    let body = send_json(client.get(format!("{}/api/trip", base_url))).await?;
    let trips = body["data"].as_array().cloned().unwrap_or_default();

    if trips.is_empty() {
        println!("{}", "No hay viajes todavía. ¡Empieza tu primer viaje!".bright_yellow());
        return Ok(());
    }

    for trip in &trips {
        print_trip(trip);
        println!("{}", "---".dimmed());
    }

    let summary = send_json(client.get(format!("{}/api/trip/summary", base_url))).await?;
    println!(
        "{}",
        format!(
            "Total: {} viajes, {} km, {} kg CO₂e",
            summary["data"]["trip_count"],
            summary["data"]["total_distance_km"],
            summary["data"]["total_carbon_kg"]
        )
        .bright_green()
        .bold()
    );
    Ok(())
}

async fn show_catalog(client: &reqwest::Client, base_url: &str) -> Result<()> {
    println!();
    println!("{}", "🚗 CATÁLOGO DE VEHÍCULOS".bright_cyan().bold());
    println!("{}", "========================".bright_cyan());

    let body = send_json(client.get(format!("{}/api/vehicle/categories", base_url))).await?;
    let categories = body["data"].as_array().cloned().unwrap_or_default();

    for category in categories {
        let name = category["category"].as_str().unwrap_or_default();
        println!("{}", format!("▶ {}", name).bright_blue().bold());

        let models = send_json(client.get(format!("{}/api/vehicle/{}/models", base_url, name))).await?;
        for model in models["data"].as_array().cloned().unwrap_or_default() {
            let marker = if model["is_default"].as_bool().unwrap_or(false) { "★" } else { " " };
            println!(
                "  {} {} ({} {}, {} kg CO₂e/{})",
                marker,
                model["name"].as_str().unwrap_or_default(),
                model["efficiency_per_unit"],
                model["consumption_unit"].as_str().unwrap_or_default(),
                model["emission_factor"],
                model["consumption_unit"].as_str().unwrap_or_default(),
            );
        }
    }
    Ok(())
}

fn print_trip(trip: &Value) {
    println!(
        "{} → {}",
        trip["start"].as_str().unwrap_or_default().bold(),
        trip["end"].as_str().unwrap_or_default()
    );
    println!(
        "{} km | {} ({})",
        trip["distance_km"],
        trip["vehicle_category"].as_str().unwrap_or_default(),
        trip["model"].as_str().unwrap_or_default()
    );
    println!(
        "Combustible: {} | CO₂: {}",
        trip["fuel_used_label"].as_str().unwrap_or_default(),
        trip["carbon_label"].as_str().unwrap_or_default()
    );
    println!("{}", trip["date"].as_str().unwrap_or_default().italic());
}
